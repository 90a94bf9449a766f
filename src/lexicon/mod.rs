pub mod core;
pub mod filter;
pub mod pool;

pub use self::core::Lexicon;
pub use filter::filter_possessives;
pub use pool::WordPool;
