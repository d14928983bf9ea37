pub type Score = u32;
pub type Rank = u32;
