pub struct Cmd;
#[allow(dead_code)]
impl Cmd {
    pub const MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN: u8 = 0x21;
    pub const SET_ROW: u8 = 0x22;
    pub const SET_PORTRAIT: u8 = 0x25;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP_1: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA0;
    pub const SET_START_LINE: u8 = 0xA2;
    pub const RESET_ALL_ON: u8 = 0xA4;
    pub const DISPLAY_ALL_ON: u8 = 0xA5;
    pub const RESET_INVERT: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const SET_MULTIPLEX: u8 = 0xA8;
    pub const SET_CHARGE_PUMP_2: u8 = 0xAC;
    pub const SELECT_IREF: u8 = 0xAD;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_PRECHARGE: u8 = 0xBC;
    pub const SET_GS_TABLE: u8 = 0xBE;
    pub const SET_DEFAULT_TABLE: u8 = 0xBF;
    pub const COM_SCAN_INC: u8 = 0xC0;
    pub const COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PHASE_LENGTH: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DESELECT: u8 = 0xDB;
    pub const SET_COMMAND_LOCK: u8 = 0xFD;

    // Scrolling is not documented for the SSD1320; opcodes follow the
    // SSD1306 command set, which the hardware partially honors.
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
    pub const ACTIVATE_SCROLL: u8 = 0x2F;
    pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;
    pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;
    pub const VERTICAL_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;
    pub const VERTICAL_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;
    pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;
}
