pub mod course_list;
pub mod panels;
