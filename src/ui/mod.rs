pub mod month_view;
pub mod calendar_view;
pub mod labels;
pub mod html;
pub mod text;
