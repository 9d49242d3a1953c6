pub mod cat;
pub mod cd;
pub mod clear;
pub mod exit;
pub mod glitch;
pub mod gui;
pub mod help;
pub mod launch;
pub mod ls;
pub mod pwd;
pub mod theme;
pub mod tree;
pub mod whoami;
