use crate::common::{BLANK, CGRAM_SIZE, DDRAM_SIZE, LINE_LENGTH, SECOND_LINE};
use crate::error::{Error, LcdResult};
use log::{debug, trace};

/// Instruction opcodes. An instruction byte is identified by its highest set
/// bit; the bits below it are the operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    ClearDisplay = 0x01,
    ReturnHome = 0x02,
    EntryModeSet = 0x04,
    DisplayControl = 0x08,
    CursorShift = 0x10,
    FunctionSet = 0x20,
    SetCgramAddress = 0x40,
    SetDdramAddress = 0x80,
}

// EntryModeSet operand
pub const ENTRY_INCREMENT: u8 = 0x02;
pub const ENTRY_SHIFT: u8 = 0x01;
// DisplayControl operand
pub const DISPLAY_ON: u8 = 0x04;
pub const CURSOR_ON: u8 = 0x02;
pub const BLINK_ON: u8 = 0x01;
// CursorShift operand
pub const SHIFT_DISPLAY: u8 = 0x08;
pub const SHIFT_RIGHT: u8 = 0x04;
// FunctionSet operand
pub const EIGHT_BIT_BUS: u8 = 0x10;
pub const TWO_LINES: u8 = 0x08;
pub const FONT_5X10: u8 = 0x04;

impl Command {
    /// Split an instruction byte into opcode and operand bits
    pub fn decode(byte: u8) -> Option<(Command, u8)> {
        let command = match byte.checked_ilog2()? {
            0 => Command::ClearDisplay,
            1 => Command::ReturnHome,
            2 => Command::EntryModeSet,
            3 => Command::DisplayControl,
            4 => Command::CursorShift,
            5 => Command::FunctionSet,
            6 => Command::SetCgramAddress,
            _ => Command::SetDdramAddress,
        };
        Some((command, byte & !(command as u8)))
    }

    /// Instruction byte for this opcode with `operand` bits set
    pub fn with(self, operand: u8) -> u8 {
        self as u8 | (operand & (self as u8).wrapping_sub(1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressTarget {
    Cgram,
    Ddram,
}

/// Register-level model of an HD44780-compatible controller.
///
/// Holds the two RAMs, the shared address counter and the mode flags. All
/// state changes go through instruction and data writes, the same way the
/// firmware talks to the real chip.
pub struct Controller {
    cgram: [u8; CGRAM_SIZE],
    ddram: [u8; DDRAM_SIZE],
    address: u8,
    target: AddressTarget,
    increment: bool,
    shift_on_write: bool,
    display_on: bool,
    cursor_on: bool,
    blink_on: bool,
    two_lines: bool,
    /// Display shift in DDRAM positions, 0..line length
    shift: u8,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Controller state after the internal power-on reset
    pub fn new() -> Self {
        Self {
            cgram: [0; CGRAM_SIZE],
            ddram: [BLANK; DDRAM_SIZE],
            address: 0,
            target: AddressTarget::Ddram,
            increment: true,
            shift_on_write: false,
            display_on: false,
            cursor_on: false,
            blink_on: false,
            two_lines: false,
            shift: 0,
        }
    }

    pub fn write_command(&mut self, byte: u8) -> LcdResult<()> {
        let (command, operand) = Command::decode(byte).ok_or(Error::EmptyInstruction)?;
        trace!("LCD: command {command:?} (0x{byte:02X})");

        match command {
            Command::ClearDisplay => {
                self.ddram.fill(BLANK);
                self.address = 0;
                self.target = AddressTarget::Ddram;
                self.increment = true;
                self.shift = 0;
            }
            Command::ReturnHome => {
                self.address = 0;
                self.target = AddressTarget::Ddram;
                self.shift = 0;
            }
            Command::EntryModeSet => {
                self.increment = operand & ENTRY_INCREMENT != 0;
                self.shift_on_write = operand & ENTRY_SHIFT != 0;
            }
            Command::DisplayControl => {
                self.display_on = operand & DISPLAY_ON != 0;
                self.cursor_on = operand & CURSOR_ON != 0;
                self.blink_on = operand & BLINK_ON != 0;
            }
            Command::CursorShift => {
                let right = operand & SHIFT_RIGHT != 0;
                if operand & SHIFT_DISPLAY != 0 {
                    self.shift_display(right);
                } else if self.target == AddressTarget::Ddram {
                    self.address = self.step_ddram(self.address, right);
                }
            }
            Command::FunctionSet => {
                if operand & EIGHT_BIT_BUS == 0 {
                    debug!("LCD: 4-bit bus requested, nibble framing is not emulated");
                }
                if operand & FONT_5X10 != 0 {
                    debug!("LCD: 5x10 font requested, only 5x8 is emulated");
                }
                self.two_lines = operand & TWO_LINES != 0;
            }
            Command::SetCgramAddress => {
                self.target = AddressTarget::Cgram;
                self.address = operand;
            }
            Command::SetDdramAddress => {
                if self.ddram_index(operand).is_none() {
                    return Err(Error::AddressOutOfRange(operand));
                }
                self.target = AddressTarget::Ddram;
                self.address = operand;
            }
        }
        Ok(())
    }

    /// Store `byte` at the address counter and advance it
    pub fn write_data(&mut self, byte: u8) {
        trace!(
            "LCD: write 0x{byte:02X} to {:?}[0x{:02X}]",
            self.target, self.address
        );
        match self.target {
            AddressTarget::Cgram => {
                self.cgram[usize::from(self.address)] = byte;
                self.address = step_cgram(self.address, self.increment);
            }
            AddressTarget::Ddram => {
                if let Some(index) = self.ddram_index(self.address) {
                    self.ddram[index] = byte;
                }
                self.address = self.step_ddram(self.address, self.increment);
                if self.shift_on_write {
                    self.shift_display(!self.increment);
                }
            }
        }
    }

    /// Read the byte at the address counter and advance it
    pub fn read_data(&mut self) -> u8 {
        match self.target {
            AddressTarget::Cgram => {
                let byte = self.cgram[usize::from(self.address)];
                self.address = step_cgram(self.address, self.increment);
                byte
            }
            AddressTarget::Ddram => {
                let byte = self
                    .ddram_index(self.address)
                    .map_or(BLANK, |index| self.ddram[index]);
                self.address = self.step_ddram(self.address, self.increment);
                byte
            }
        }
    }

    pub fn address_counter(&self) -> (AddressTarget, u8) {
        (self.target, self.address)
    }

    pub fn is_display_on(&self) -> bool {
        self.display_on
    }

    pub fn is_cursor_on(&self) -> bool {
        self.cursor_on
    }

    pub fn is_blink_on(&self) -> bool {
        self.blink_on
    }

    pub fn is_two_line(&self) -> bool {
        self.two_lines
    }

    /// Character code stored at a DDRAM address
    pub fn ddram_at(&self, address: u8) -> Option<u8> {
        self.ddram_index(address).map(|index| self.ddram[index])
    }

    /// Pattern rows for a character code that selects CGRAM (0x00-0x0F,
    /// where 0x08-0x0F alias 0x00-0x07). Upper bits are returned as stored.
    pub fn cgram_pattern(&self, code: u8) -> Option<[u8; 8]> {
        if code >= 0x10 {
            return None;
        }
        let start = usize::from(code & 0x07) * 8;
        let mut rows = [0u8; 8];
        rows.copy_from_slice(&self.cgram[start..start + 8]);
        Some(rows)
    }

    /// Character code visible at `column` of the line starting at DDRAM
    /// address `row_offset`, taking the display shift into account
    pub fn visible_code(&self, row_offset: u8, column: u8) -> Option<u8> {
        let line_length = self.line_length();
        let line_start = if self.two_lines {
            row_offset & SECOND_LINE
        } else {
            0
        };
        let position = u16::from(row_offset - line_start)
            + u16::from(column)
            + u16::from(self.shift);
        let wrapped = u8::try_from(position % u16::from(line_length)).ok()?;
        self.ddram_at(line_start + wrapped)
    }

    fn line_length(&self) -> u8 {
        if self.two_lines {
            LINE_LENGTH
        } else {
            2 * LINE_LENGTH
        }
    }

    fn shift_display(&mut self, right: bool) {
        let line_length = self.line_length();
        self.shift = if right {
            (self.shift + line_length - 1) % line_length
        } else {
            (self.shift + 1) % line_length
        };
        trace!("LCD: display shift now {}", self.shift);
    }

    fn ddram_index(&self, address: u8) -> Option<usize> {
        if self.two_lines {
            match address {
                0x00..0x28 => Some(usize::from(address)),
                0x40..0x68 => Some(usize::from(address - SECOND_LINE + LINE_LENGTH)),
                _ => None,
            }
        } else if address < 2 * LINE_LENGTH {
            Some(usize::from(address))
        } else {
            None
        }
    }

    fn step_ddram(&self, address: u8, forward: bool) -> u8 {
        let last_of_line = LINE_LENGTH - 1;
        if self.two_lines {
            match (address, forward) {
                (0x27, true) => SECOND_LINE,
                (0x67, true) => 0x00,
                (0x00, false) => SECOND_LINE + last_of_line,
                (0x40, false) => last_of_line,
                (_, true) => address + 1,
                (_, false) => address - 1,
            }
        } else if forward {
            (address + 1) % (2 * LINE_LENGTH)
        } else {
            address.checked_sub(1).unwrap_or(2 * LINE_LENGTH - 1)
        }
    }
}

fn step_cgram(address: u8, forward: bool) -> u8 {
    let next = if forward {
        address.wrapping_add(1)
    } else {
        address.wrapping_sub(1)
    };
    next & 0x3F
}
