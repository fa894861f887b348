pub mod pos_tag;
pub mod pos_tagger;
pub mod sentence_splitter;
pub mod text_processor;
pub mod word_tokenizer;
