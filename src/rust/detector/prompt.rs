/// Builds the classification prompt for `text`.
///
/// The text is embedded verbatim between double quotes. Nothing is escaped,
/// so input that imitates instructions reaches the model unchanged.
pub fn build_prompt(text: &str) -> String {
    format!(
        "Analyze the following text for cyberbullying content.\n\
         Cyberbullying includes harassment, threats, hate speech, insults, or any content \
         intended to harm someone emotionally.\n\
         \n\
         Text to analyze: \"{text}\"\n\
         \n\
         Respond with a JSON object containing:\n\
         1. \"isCyberbullying\": a boolean indicating if cyberbullying was detected\n\
         2. \"explanation\": a brief explanation of why the text is or is not considered cyberbullying\n\
         3. \"confidence\": a number between 0 and 1 indicating the confidence level of this assessment\n\
         \n\
         Only respond with the JSON object, no additional text."
    )
}
