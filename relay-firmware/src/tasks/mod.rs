// Task-Modul: Enthält alle Embassy Tasks
//
// Der Indicator ist der einzige Task. Der Matter Stack erreicht ihn nur
// über die Modus-Queue (siehe crate::matter).

pub mod indicator;

pub use indicator::indicator_task;
