mod resolver;
mod share;

pub use resolver::{FallbackTier, PoiResolver, RESOLUTION_ORDER};
pub use share::ShareService;
