pub mod api;
pub mod api_utils;
pub mod components;
pub mod icons;
pub mod input_utils;
pub mod page_frame;
