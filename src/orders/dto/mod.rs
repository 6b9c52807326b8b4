pub mod create_order_dto;
pub mod get_order_dto;
pub mod update_order_dto;
