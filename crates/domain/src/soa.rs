/// Fixed SOA timers for the synthetic zones.
///
/// Nothing in the server updates zone contents, so the serial never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoaTimers {
    pub serial: u32,
    pub refresh: i32,
    pub retry: i32,
    pub expire: i32,
}

impl SoaTimers {
    pub const SERIAL: u32 = 12345;
    pub const REFRESH: i32 = 7200;
    pub const RETRY: i32 = 1800;
    pub const EXPIRE: i32 = 86400;
}

impl Default for SoaTimers {
    fn default() -> Self {
        Self {
            serial: Self::SERIAL,
            refresh: Self::REFRESH,
            retry: Self::RETRY,
            expire: Self::EXPIRE,
        }
    }
}
