pub mod error;
pub mod health;
pub mod html;
pub mod openapi;
pub mod pages;
pub mod score;
