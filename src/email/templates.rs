pub fn render_one_time_code(code: &str) -> String {
    format!(
        "Your password reset code is: {code}\n\n\
         The code expires in 15 minutes. If you didn't request a reset, you can ignore this email.\n"
    )
}
