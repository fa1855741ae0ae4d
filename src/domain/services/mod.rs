//! # Domain Services
//!
//! エンティティに依存しない純粋なルール

pub mod timestamp;
