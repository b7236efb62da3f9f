#![allow(dead_code)]

pub mod fakes;
pub mod redis_container;
