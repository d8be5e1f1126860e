mod app_flow;
mod breathing;
mod config;
mod meditation;
