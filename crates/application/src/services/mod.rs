mod reply;
mod zone_authority;

pub use reply::reply_to;
pub use zone_authority::ZoneAuthority;
