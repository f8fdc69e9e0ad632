pub mod blog_pipeline;
