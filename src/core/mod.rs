pub mod id;
pub mod ops;
pub mod state;
pub mod task;
pub mod task_list;
