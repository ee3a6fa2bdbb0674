pub mod controller;
pub mod task;
pub mod task_list;
