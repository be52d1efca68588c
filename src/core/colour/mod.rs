pub mod colour_mapper;
pub mod palette;
