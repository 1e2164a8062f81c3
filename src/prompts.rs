use crate::session::ActiveQuiz;

/// Prompt asking the model to turn a previously asked query into a quiz question
pub fn quiz_prompt(topic: &str) -> String {
    format!(
        "Create a short conceptual quiz question based on the following topic. Do NOT give the answer.\n\nTopic: {}",
        topic
    )
}

/// Examiner prompt for grading a submitted answer.
///
/// The topic block appears only when the quiz carries one. The instruction to
/// begin with 'Correct:' or 'Incorrect:' is a convention the model is trusted
/// to follow; the reply is displayed verbatim either way.
pub fn evaluation_prompt(quiz: &ActiveQuiz, answer: &str) -> String {
    match &quiz.topic {
        Some(topic) => format!(
            "You are an examiner.\n\nTopic: {}\n\nQuestion: {}\n\nStudent Answer: {}\n\nDecide whether the answer is correct or incorrect. Start your response with either 'Correct:' or 'Incorrect:' and then give a brief explanation.",
            topic, quiz.question, answer
        ),
        None => format!(
            "You are an examiner.\n\nQuestion: {}\n\nStudent Answer: {}\n\nDecide whether the answer is correct or incorrect. Start your response with either 'Correct:' or 'Incorrect:' and then give a brief explanation.",
            quiz.question, answer
        ),
    }
}
