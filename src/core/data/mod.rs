pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod pixel_result;
pub mod point;
pub mod view_state;
pub mod window_size;
