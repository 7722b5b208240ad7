pub mod errors;
pub mod db;
pub mod product;
pub mod order;

#[cfg(test)]
mod tests;
