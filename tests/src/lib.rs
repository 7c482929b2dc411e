#![cfg(test)]

mod checks;
mod support;
