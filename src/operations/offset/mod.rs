mod border_offset_2d;

pub use border_offset_2d::BorderOffset2D;
