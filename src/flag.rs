pub struct Flag;
#[allow(dead_code)]
impl Flag {
    pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;
    pub const SEG_REMAP_FLIP: u8 = 0x01;
    pub const CONTRAST_DEFAULT: u8 = 0x5A;
    /// Time interval between scroll steps, in frames. The encoding is the
    /// SSD1306's: 5/64/128/256/3/4/25/2 frames for values 0..=7.
    pub const SCROLL_INTERVAL_2_FRAMES: u8 = 0x07;
    pub const SCROLL_VERTICAL_OFFSET_1: u8 = 0x01;
}
