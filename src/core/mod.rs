pub mod bullet;
pub mod prompt;
pub mod prompter;
pub mod registry;
pub mod task_record;
pub mod work_item;
