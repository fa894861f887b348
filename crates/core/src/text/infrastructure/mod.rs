pub mod lexicon_pos_tagger;
pub mod punctuation_sentence_splitter;
pub mod regex_word_tokenizer;
