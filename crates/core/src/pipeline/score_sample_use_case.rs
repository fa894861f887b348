use std::time::Instant;

use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::pause_detector::PauseDetector;
use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::audio::domain::transcript::transcript_text;
use crate::pipeline::sample_report::SampleReport;
use crate::pipeline::scoring_logger::ScoringLogger;
use crate::pipeline::speech_sample::SpeechSample;
use crate::scoring::grammar_scorer::GrammarScorer;
use crate::text::domain::pos_tag::PosTag;
use crate::text::domain::text_processor::TextProcessor;

/// Wires the audio and text collaborators to the scoring engine.
pub struct ScoreSampleUseCase {
    scorer: GrammarScorer,
    processor: TextProcessor,
    logger: Box<dyn ScoringLogger>,
}

impl ScoreSampleUseCase {
    pub fn new(
        scorer: GrammarScorer,
        processor: TextProcessor,
        logger: Box<dyn ScoringLogger>,
    ) -> Self {
        Self {
            scorer,
            processor,
            logger,
        }
    }

    pub fn scorer(&self) -> &GrammarScorer {
        &self.scorer
    }

    pub fn score_sample(&mut self, sample: SpeechSample) -> SampleReport {
        let mut report = self.score_transcript(
            &sample.transcript,
            sample.duration_seconds,
            sample.pause_count,
            sample.pos_tags,
        );
        report.audio_file = sample.audio_file;
        report
    }

    /// Score a transcript whose duration and pauses were measured upstream.
    ///
    /// Without `pos_tags`, tags come from the text processor (cleaned,
    /// optionally lowercased text). The engine always sees the raw transcript.
    pub fn score_transcript(
        &mut self,
        transcript: &str,
        duration_seconds: f64,
        pause_count: u32,
        pos_tags: Option<Vec<PosTag>>,
    ) -> SampleReport {
        if transcript.trim().is_empty() {
            log::warn!("Empty transcript; all text-based components will be zero");
        }
        if duration_seconds == 0.0 {
            log::warn!("Zero audio duration; fluency will be zero");
        }

        let pos_tags = match pos_tags {
            Some(tags) => tags,
            None => {
                let started = Instant::now();
                let processed = self.processor.preprocess(transcript);
                let profile = self.processor.profile(&processed);
                self.logger.timing("preprocess", elapsed_ms(started));
                self.logger
                    .metric("avg_word_length", profile.avg_word_length);
                self.logger
                    .metric("sentence_length_std", profile.sentence_length_std);
                self.logger
                    .metric("content_words", processed.words_filtered.len() as f64);
                processed.pos_tags
            }
        };

        let started = Instant::now();
        let result = self
            .scorer
            .score(transcript, duration_seconds, pause_count, &pos_tags);
        self.logger.timing("score", elapsed_ms(started));
        self.logger
            .metric("words", result.statistics.total_words as f64);
        self.logger
            .metric("errors", result.errors.total_errors as f64);
        self.logger.info(&format!(
            "Final score {:.2}/{}",
            result.final_score,
            self.scorer.config().max_score
        ));

        SampleReport::new(
            None,
            transcript.to_string(),
            duration_seconds,
            pause_count,
            result,
        )
    }

    /// Transcribe, measure and score an in-memory audio sample.
    ///
    /// Recognition runs on the original audio; duration and pauses are
    /// measured after normalization and silence trimming.
    pub fn score_audio(
        &mut self,
        mut audio: AudioSegment,
        recognizer: &dyn SpeechRecognizer,
    ) -> Result<SampleReport, Box<dyn std::error::Error>> {
        let started = Instant::now();
        let words = recognizer.transcribe(&audio)?;
        self.logger.timing("transcribe", elapsed_ms(started));

        let transcript = transcript_text(&words);
        if transcript.is_empty() {
            return Err("transcription produced no words".into());
        }
        self.logger.info(&format!("Transcript: {transcript}"));

        let started = Instant::now();
        let audio_config = self.scorer.config().audio.clone();
        if audio_config.normalize {
            audio.normalize();
        }
        if audio_config.remove_silence {
            audio.trim_silence(
                audio_config.silence_threshold_db,
                audio_config.frame_length,
                audio_config.hop_length,
            );
        }
        let duration = audio.duration();
        let pauses = PauseDetector::from_config(&audio_config).count(&audio);
        self.logger.timing("audio", elapsed_ms(started));
        self.logger.metric("pauses", pauses as f64);
        self.logger
            .info(&format!("Audio duration: {duration:.2}s, Pauses detected: {pauses}"));

        Ok(self.score_transcript(&transcript, duration, pauses, None))
    }

    pub fn finish(&self) {
        self.logger.summary();
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
