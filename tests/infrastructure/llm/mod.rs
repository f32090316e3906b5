mod embedder_factory_test;
mod openai_embedder_test;
