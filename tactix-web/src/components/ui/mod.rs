pub mod move_list;
pub mod status_line;
