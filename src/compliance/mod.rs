//! GFI 컴플라이언스 비용 계산 모듈 모음.

pub mod calculator;
pub mod chart;
pub mod comparison;
pub mod report;

pub use calculator::*;
pub use chart::*;
pub use comparison::*;
