mod config;
mod landing_flow;
mod rendering;
