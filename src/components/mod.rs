//! UI Components
//!
//! Reusable Leptos components.

mod button;
mod task_input;
mod task_list;
mod add_task_bar;
mod copy_button;
mod nav_bar;
mod sticky_footer;

pub use button::Button;
pub use task_input::TaskInput;
pub use task_list::TaskList;
pub use add_task_bar::AddTaskBar;
pub use copy_button::CopyButton;
pub use nav_bar::NavBar;
pub use sticky_footer::StickyFooter;
