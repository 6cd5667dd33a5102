use std::collections::HashMap;

use rand::{seq::SliceRandom, Rng};
use thiserror::Error;

use crate::models::domain::{Difficulty, Quiz, QuizQuestion};

pub const DEFAULT_QUESTION_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("No quiz bank has been loaded")]
    NoQuizBank,

    #[error("Quiz bank '{0}' has no questions")]
    EmptyQuizBank(String),

    #[error("Quiz bank has no questions with difficulty '{0}'")]
    NoQuestionsForDifficulty(Difficulty),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(usize),
    Completed { score: u8 },
}

/// One learner's attempt at a quiz bank.
///
/// The session owns a copy of the bank and is only ever mutated through its
/// own methods. Two states exist: in progress, and completed once `advance`
/// is called on the last active question.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz_bank: Option<Quiz>,
    active_questions: Vec<QuizQuestion>,
    current_index: usize,
    user_answers: HashMap<String, String>,
    score: u8,
    completed: bool,
    difficulty: Option<Difficulty>,
    question_limit: usize,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self::with_question_limit(DEFAULT_QUESTION_LIMIT)
    }

    pub fn with_question_limit(question_limit: usize) -> Self {
        Self {
            quiz_bank: None,
            active_questions: Vec::new(),
            current_index: 0,
            user_answers: HashMap::new(),
            score: 0,
            completed: false,
            difficulty: None,
            question_limit: question_limit.max(1),
        }
    }

    /// Replaces the stored bank. Progress of a running attempt is kept until
    /// the next `start_session`.
    pub fn load_quiz_bank(&mut self, quiz: Quiz) {
        self.quiz_bank = Some(quiz);
    }

    pub fn start_session(&mut self, difficulty: Difficulty) -> Result<usize, SessionError> {
        self.start_session_with_rng(difficulty, &mut rand::thread_rng())
    }

    /// Draws a fresh active set: questions of `difficulty` in bank order,
    /// shuffled, then capped at the question limit. State is left untouched
    /// when no question qualifies.
    pub fn start_session_with_rng<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<usize, SessionError> {
        let quiz = self.quiz_bank.as_ref().ok_or(SessionError::NoQuizBank)?;
        if quiz.questions.is_empty() {
            return Err(SessionError::EmptyQuizBank(quiz.id.clone()));
        }

        let mut selected: Vec<QuizQuestion> =
            quiz.questions_with_difficulty(difficulty).cloned().collect();
        if selected.is_empty() {
            return Err(SessionError::NoQuestionsForDifficulty(difficulty));
        }

        // SliceRandom::shuffle is an in-place Fisher-Yates
        selected.shuffle(rng);
        selected.truncate(self.question_limit);

        log::debug!(
            "Starting {} session on quiz '{}' with {} questions",
            difficulty,
            quiz.id,
            selected.len()
        );

        self.active_questions = selected;
        self.difficulty = Some(difficulty);
        self.clear_progress();

        Ok(self.active_questions.len())
    }

    pub fn select_answer(&mut self, question_id: &str, answer: &str) {
        self.user_answers
            .insert(question_id.to_string(), answer.to_string());
    }

    pub fn advance(&mut self) -> Advance {
        if self.current_index + 1 < self.active_questions.len() {
            self.current_index += 1;
            return Advance::Moved(self.current_index);
        }

        self.compute_score();
        self.completed = true;
        Advance::Completed { score: self.score }
    }

    pub fn retreat(&mut self) -> usize {
        self.current_index = self.current_index.saturating_sub(1);
        self.current_index
    }

    /// Starts over. With a recorded difficulty a new active set is drawn, so
    /// the learner may see different questions on the next try.
    pub fn reset_session(&mut self) -> Result<(), SessionError> {
        self.reset_session_with_rng(&mut rand::thread_rng())
    }

    pub fn reset_session_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        match self.difficulty {
            Some(difficulty) => self.start_session_with_rng(difficulty, rng).map(|_| ()),
            None => {
                self.clear_progress();
                Ok(())
            }
        }
    }

    pub fn user_answer(&self, question_id: &str) -> Option<&str> {
        self.user_answers.get(question_id).map(String::as_str)
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.active_questions.get(self.current_index)
    }

    pub fn total_questions(&self) -> usize {
        self.active_questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn active_questions(&self) -> &[QuizQuestion] {
        &self.active_questions
    }

    pub fn answered_count(&self) -> usize {
        self.active_questions
            .iter()
            .filter(|question| self.user_answers.contains_key(&question.id))
            .count()
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn quiz_bank(&self) -> Option<&Quiz> {
        self.quiz_bank.as_ref()
    }

    fn clear_progress(&mut self) {
        self.current_index = 0;
        self.user_answers.clear();
        self.score = 0;
        self.completed = false;
    }

    fn compute_score(&mut self) {
        let total = self.active_questions.len();
        if total == 0 {
            return;
        }

        let correct = self
            .active_questions
            .iter()
            .filter(|question| {
                self.user_answer(&question.id)
                    .is_some_and(|answer| question.is_correct(answer))
            })
            .count();

        self.score = percentage(correct, total);
    }
}

/// `round(100 * part / whole)` with halves rounded up. `whole` must be non-zero.
fn percentage(part: usize, whole: usize) -> u8 {
    ((part * 200 + whole) / (whole * 2)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{pythagoras_quiz, question, sample_quiz};
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn started(quiz: Quiz, difficulty: Difficulty) -> QuizSession {
        let mut session = QuizSession::new();
        session.load_quiz_bank(quiz);
        session
            .start_session_with_rng(difficulty, &mut rng())
            .expect("session should start");
        session
    }

    fn answer_all_correctly(session: &mut QuizSession) {
        let answers: Vec<(String, String)> = session
            .active_questions()
            .iter()
            .map(|q| (q.id.clone(), q.correct_answer().unwrap_or_default().to_string()))
            .collect();
        for (id, answer) in answers {
            session.select_answer(&id, &answer);
        }
    }

    #[test]
    fn start_without_quiz_bank_fails_and_changes_nothing() {
        let mut session = QuizSession::new();

        let result = session.start_session_with_rng(Difficulty::Easy, &mut rng());

        assert_eq!(result, Err(SessionError::NoQuizBank));
        assert_eq!(session.total_questions(), 0);
        assert_eq!(session.difficulty(), None);
    }

    #[test]
    fn start_with_empty_quiz_bank_fails() {
        let mut session = QuizSession::new();
        session.load_quiz_bank(Quiz::new("quiz-empty", "pythagoras-v1", "Kosong", vec![]));

        let result = session.start_session_with_rng(Difficulty::Easy, &mut rng());

        assert_eq!(result, Err(SessionError::EmptyQuizBank("quiz-empty".to_string())));
    }

    #[test]
    fn start_with_unmatched_difficulty_keeps_previous_session() {
        let mut session = started(sample_quiz(), Difficulty::Easy);
        session.select_answer("easy-1", "3");
        session.advance();
        let before: Vec<String> = session.active_questions().iter().map(|q| q.id.clone()).collect();

        let result = session.start_session_with_rng(Difficulty::Medium, &mut rng());

        assert_eq!(
            result,
            Err(SessionError::NoQuestionsForDifficulty(Difficulty::Medium))
        );
        let after: Vec<String> = session.active_questions().iter().map(|q| q.id.clone()).collect();
        assert_eq!(before, after);
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.user_answer("easy-1"), Some("3"));
        assert_eq!(session.difficulty(), Some(Difficulty::Easy));
    }

    #[test]
    fn smaller_pool_than_limit_uses_every_matching_question() {
        let session = started(sample_quiz(), Difficulty::Easy);

        assert_eq!(session.total_questions(), 3);
        assert!(session
            .active_questions()
            .iter()
            .all(|q| q.difficulty == Difficulty::Easy));
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_completed());
    }

    #[test]
    fn active_set_is_capped_and_drawn_from_the_bank_without_duplicates() {
        let quiz = pythagoras_quiz();
        let bank_ids: HashSet<String> = quiz.questions.iter().map(|q| q.id.clone()).collect();

        for seed in 0..20 {
            let mut session = QuizSession::new();
            session.load_quiz_bank(quiz.clone());
            let count = session
                .start_session_with_rng(Difficulty::Easy, &mut StdRng::seed_from_u64(seed))
                .expect("session should start");

            assert_eq!(count, DEFAULT_QUESTION_LIMIT);
            let ids: HashSet<String> =
                session.active_questions().iter().map(|q| q.id.clone()).collect();
            assert_eq!(ids.len(), count);
            assert!(ids.is_subset(&bank_ids));
            assert!(session
                .active_questions()
                .iter()
                .all(|q| q.difficulty == Difficulty::Easy));
        }
    }

    #[test]
    fn shuffle_is_a_permutation_of_the_filtered_pool() {
        let quiz = pythagoras_quiz();
        let mut expected: Vec<String> = quiz
            .questions_with_difficulty(Difficulty::Easy)
            .map(|q| q.id.clone())
            .collect();
        let mut session = QuizSession::with_question_limit(usize::MAX);
        session.load_quiz_bank(quiz);

        session
            .start_session_with_rng(Difficulty::Easy, &mut rng())
            .expect("session should start");

        let mut actual: Vec<String> =
            session.active_questions().iter().map(|q| q.id.clone()).collect();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn select_answer_round_trips_and_overwrites() {
        let mut session = started(sample_quiz(), Difficulty::Hard);

        session.select_answer("hard-1", "10 cm");
        assert_eq!(session.user_answer("hard-1"), Some("10 cm"));

        session.select_answer("hard-1", "12 cm");
        assert_eq!(session.user_answer("hard-1"), Some("12 cm"));
        assert_eq!(session.answered_count(), 1);
        assert_eq!(session.user_answer("hard-2"), None);
    }

    #[test]
    fn select_answer_accepts_ids_outside_the_active_set() {
        let mut session = started(sample_quiz(), Difficulty::Hard);

        session.select_answer("not-in-session", "x");

        assert_eq!(session.user_answer("not-in-session"), Some("x"));
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn retreat_at_first_question_is_a_no_op() {
        let mut session = started(sample_quiz(), Difficulty::Easy);

        assert_eq!(session.retreat(), 0);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn navigation_moves_within_bounds() {
        let mut session = started(sample_quiz(), Difficulty::Easy);

        assert_eq!(session.advance(), Advance::Moved(1));
        assert_eq!(session.advance(), Advance::Moved(2));
        assert_eq!(session.retreat(), 1);
        assert_eq!(
            session.current_question().map(|q| q.id.clone()),
            session.active_questions().get(1).map(|q| q.id.clone())
        );
    }

    #[test]
    fn advancing_total_questions_times_completes_without_overflow() {
        let mut session = started(sample_quiz(), Difficulty::Easy);
        let total = session.total_questions();

        for _ in 0..total {
            session.advance();
        }

        assert!(session.is_completed());
        assert_eq!(session.current_index(), total - 1);
        assert!(session.current_question().is_some());
    }

    #[test]
    fn all_correct_answers_score_one_hundred() {
        let mut session = started(sample_quiz(), Difficulty::Hard);
        answer_all_correctly(&mut session);

        let mut outcome = Advance::Moved(0);
        for _ in 0..session.total_questions() {
            outcome = session.advance();
        }

        assert_eq!(outcome, Advance::Completed { score: 100 });
        assert_eq!(session.score(), 100);
        assert!(session.is_completed());
    }

    #[test]
    fn no_answers_score_zero() {
        let mut session = started(sample_quiz(), Difficulty::Hard);

        for _ in 0..session.total_questions() {
            session.advance();
        }

        assert!(session.is_completed());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn partial_answers_round_to_nearest_percent() {
        let mut session = started(sample_quiz(), Difficulty::Easy);
        let first = session.active_questions()[0].clone();
        let second = session.active_questions()[1].clone();
        session.select_answer(&first.id, first.correct_answer().unwrap_or_default());
        session.select_answer(&second.id, first.correct_answer().unwrap_or_default());
        session.select_answer(&second.id, second.correct_answer().unwrap_or_default());

        for _ in 0..session.total_questions() {
            session.advance();
        }

        // 2 of 3 correct
        assert_eq!(session.score(), 67);
    }

    #[test]
    fn wrong_answer_does_not_count() {
        let mut session = started(sample_quiz(), Difficulty::Easy);
        let first_id = session.active_questions()[0].id.clone();
        session.select_answer(&first_id, "definitely wrong");

        for _ in 0..session.total_questions() {
            session.advance();
        }

        assert_eq!(session.score(), 0);
    }

    #[test]
    fn advance_with_no_active_questions_completes_with_zero_score() {
        let mut session = QuizSession::new();

        assert_eq!(session.advance(), Advance::Completed { score: 0 });
        assert!(session.is_completed());
        assert_eq!(session.current_index(), 0);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn reset_with_difficulty_draws_a_new_in_progress_session() {
        let mut session = started(sample_quiz(), Difficulty::Hard);
        answer_all_correctly(&mut session);
        for _ in 0..session.total_questions() {
            session.advance();
        }
        assert!(session.is_completed());

        session
            .reset_session_with_rng(&mut rng())
            .expect("reset should succeed");

        assert!(!session.is_completed());
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.answered_count(), 0);
        assert_eq!(session.total_questions(), 3);
        assert_eq!(session.difficulty(), Some(Difficulty::Hard));
    }

    #[test]
    fn reset_without_difficulty_only_clears_progress() {
        let mut session = QuizSession::new();
        session.select_answer("q1", "5 cm");
        session.advance();

        session.reset_session().expect("reset should succeed");

        assert!(!session.is_completed());
        assert_eq!(session.user_answer("q1"), None);
        assert_eq!(session.total_questions(), 0);
    }

    #[test]
    fn loading_a_new_bank_leaves_progress_untouched() {
        let mut session = started(sample_quiz(), Difficulty::Easy);
        session.advance();

        session.load_quiz_bank(Quiz::new(
            "quiz-2",
            "pythagoras-v1",
            "Kuis Lain",
            vec![question("other-1", Difficulty::Easy, "5 cm")],
        ));

        assert_eq!(session.current_index(), 1);
        assert_eq!(session.total_questions(), 3);
        assert_eq!(session.quiz_bank().map(|q| q.id.as_str()), Some("quiz-2"));
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(1, 8), 13); // 12.5
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(0, 5), 0);
        assert_eq!(percentage(5, 5), 100);
    }
}
