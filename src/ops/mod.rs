pub mod category_ops;
pub mod task_ops;
pub mod view;
