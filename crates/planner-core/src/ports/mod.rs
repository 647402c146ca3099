//! Ports - 抽象化レイヤー
//!
//! 時刻と ID 生成だけを差し替え可能にしています。
//! ストア本体は I/O を持たないので、それ以外のポートはありません。

pub mod clock;
pub mod id_generator;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
