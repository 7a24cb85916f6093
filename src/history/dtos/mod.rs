pub mod get_history_filter_dto;
