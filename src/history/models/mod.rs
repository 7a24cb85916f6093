pub mod transformation_history_item;
