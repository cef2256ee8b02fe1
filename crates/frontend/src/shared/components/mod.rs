pub mod select_all_checkbox;
