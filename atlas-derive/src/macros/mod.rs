pub mod theme_key;
