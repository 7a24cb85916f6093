pub mod transform_dto;
