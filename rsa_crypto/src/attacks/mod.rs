pub mod fermat;
pub mod wiener;

pub use fermat::{FermatAttack, FermatAttackResult};
pub use wiener::{ContinuedFractionTerm, WienerAttack, WienerAttackResult};
