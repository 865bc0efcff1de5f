use super::Word;

pub const REGISTER_COUNT    : usize = 32;

pub const STACK_SIZE        : usize = 100;
pub const STACK_BASE        : Word  = 40_000;
pub const STACK_LIMIT       : Word  = 40_396;
pub const DATA_BASE         : Word  = 40_400;

pub const WORD_BYTES        : usize = 4;

pub const SP_INIT           : Word  = STACK_LIMIT;
pub const GP_INIT           : Word  = 100_000_000;

pub const MAX_PROGRAM_LINES : usize = 10_000;
