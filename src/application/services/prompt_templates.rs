use crate::domain::Language;

const SYSTEM_PROMPT_VI: &str = "Bạn là một trợ lý du lịch thông minh chuyên về Việt Nam.
Nhiệm vụ của bạn là:
1. Trả lời các câu hỏi về du lịch Việt Nam một cách chính xác và hữu ích
2. Đề xuất lịch trình du lịch phù hợp với nhu cầu
3. Giới thiệu các địa điểm, ẩm thực, văn hóa
4. Cung cấp các liên kết hữu ích khi phù hợp

Hãy trả lời bằng tiếng Việt, thân thiện và nhiệt tình.
Sử dụng thông tin từ context được cung cấp để đưa ra câu trả lời chính xác.
Nếu không chắc chắn, hãy thừa nhận và đề xuất hướng tìm hiểu thêm.";

const SYSTEM_PROMPT_EN: &str = "You are an intelligent travel assistant specializing in Vietnam.
Your tasks are:
1. Answer questions about Vietnam travel accurately and helpfully
2. Suggest appropriate travel itineraries
3. Introduce destinations, cuisine, and culture
4. Provide useful links when appropriate

Respond in English, being friendly and enthusiastic.
Use information from the provided context to give accurate answers.
If unsure, acknowledge it and suggest ways to learn more.";

pub fn system_prompt(language: Language) -> &'static str {
    match language {
        Language::Vi => SYSTEM_PROMPT_VI,
        Language::En => SYSTEM_PROMPT_EN,
    }
}

pub fn reference_header(language: Language) -> &'static str {
    match language {
        Language::Vi => "Thông tin tham khảo:",
        Language::En => "Reference information:",
    }
}

pub fn follow_up_prompt(language: Language, query: &str, answer: &str) -> String {
    match language {
        Language::Vi => format!(
            "Dựa trên câu hỏi và câu trả lời sau, hãy tạo 3 câu hỏi tiếp theo hữu ích mà người dùng có thể quan tâm.\n\n\
             Câu hỏi: {query}\n\
             Câu trả lời: {answer}\n\n\
             Chỉ trả về 3 câu hỏi, mỗi câu trên một dòng, không cần đánh số."
        ),
        Language::En => format!(
            "Based on the following question and answer, generate 3 useful follow-up questions that the user might be interested in.\n\n\
             Question: {query}\n\
             Answer: {answer}\n\n\
             Return only 3 questions, one per line, without numbering."
        ),
    }
}

pub fn links_heading(language: Language) -> &'static str {
    match language {
        Language::Vi => "**Liên kết hữu ích:**",
        Language::En => "**Useful links:**",
    }
}

pub fn apology(language: Language) -> &'static str {
    match language {
        Language::Vi => "Xin lỗi, tôi đang gặp sự cố kỹ thuật. Vui lòng thử lại sau.",
        Language::En => "Sorry, I'm experiencing technical difficulties. Please try again later.",
    }
}
