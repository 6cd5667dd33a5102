use crate::models::domain::{
    Difficulty, LearningModule, QuestionOption, QuestionType, Quiz, QuizQuestion,
};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A multiple-choice question whose only correct option is `correct`.
    /// Distractors are "1 cm", "2 cm" and "3 cm".
    pub fn question(id: &str, difficulty: Difficulty, correct: &str) -> QuizQuestion {
        let mut options = vec![QuestionOption {
            text: correct.to_string(),
            is_correct: true,
        }];
        options.extend(["1 cm", "2 cm", "3 cm"].into_iter().map(|text| QuestionOption {
            text: text.to_string(),
            is_correct: false,
        }));

        QuizQuestion {
            id: id.to_string(),
            text: format!("Pertanyaan {}", id),
            question_type: QuestionType::MultipleChoice,
            options,
            difficulty,
            correct_answer: None,
            image_url: None,
        }
    }

    /// Three easy and three hard questions.
    pub fn sample_quiz() -> Quiz {
        Quiz::new(
            "quiz-sample",
            "pythagoras-v1",
            "Kuis Contoh",
            vec![
                question("easy-1", Difficulty::Easy, "5 cm"),
                question("hard-1", Difficulty::Hard, "12 cm"),
                question("easy-2", Difficulty::Easy, "10 cm"),
                question("hard-2", Difficulty::Hard, "13 cm"),
                question("easy-3", Difficulty::Easy, "25 cm"),
                question("hard-3", Difficulty::Hard, "17 cm"),
            ],
        )
    }

    /// Seven easy, two medium and one hard question.
    pub fn pythagoras_quiz() -> Quiz {
        let mut questions: Vec<QuizQuestion> = (1..=7)
            .map(|n| question(&format!("p-easy-{}", n), Difficulty::Easy, "5 cm"))
            .collect();
        questions.push(question("p-medium-1", Difficulty::Medium, "12 cm"));
        questions.push(question("p-medium-2", Difficulty::Medium, "8 cm"));
        questions.push(question("p-hard-1", Difficulty::Hard, "7 cm"));

        Quiz::new("quiz-pythagoras-1", "pythagoras-v1", "Kuis Pythagoras Dasar", questions)
    }

    pub fn sample_modules() -> Vec<LearningModule> {
        vec![
            LearningModule::new(
                "pythagoras-v1",
                "Petualangan Teorema Pythagoras",
                "Menjelajahi rahasia di balik segitiga siku-siku.",
                1,
            ),
            LearningModule::new(
                "pythagoras-v2",
                "Tripel Pythagoras",
                "Mengenal pasangan bilangan istimewa.",
                2,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_quiz() {
        let quiz = sample_quiz();
        assert_eq!(quiz.questions.len(), 6);
        assert!(quiz.questions.iter().all(|q| q.correct_answer().is_some()));
    }

    #[test]
    fn test_fixtures_question_has_single_correct_option() {
        let q = question("q1", super::Difficulty::Easy, "5 cm");
        assert_eq!(q.options.iter().filter(|o| o.is_correct).count(), 1);
        assert_eq!(q.correct_answer(), Some("5 cm"));
    }
}
