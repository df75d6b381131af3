use crate::form::field_model::{ChoiceKind, FieldDescriptor, Form, TextInputType};

/// Container id the contact page reserves for the generated table.
pub const DEFAULT_CONTAINER_ID: &str = "form";

/// The built-in contact form: four free-text inputs, a reply-method radio
/// group, a call-time checkbox group, an inquiry-kind dropdown and a
/// free-form inquiry textarea.
pub fn contact_form() -> Form {
    Form::new(vec![
        FieldDescriptor::text(TextInputType::Text, "name", "お名前", "例）山田　太郎"),
        FieldDescriptor::text(
            TextInputType::Email,
            "email",
            "メールアドレス",
            "例）example@gmail.com",
        ),
        FieldDescriptor::text(TextInputType::Tel, "tel", "電話番号", "例）080-1234-5678"),
        FieldDescriptor::text(
            TextInputType::Text,
            "address",
            "ご住所",
            "例）東京都千代田区丸の内1丁目9-2",
        ),
        FieldDescriptor::choice(
            ChoiceKind::Radio,
            "contact",
            "ご希望の返信方法",
            &[("メール", 0), ("電話", 1), ("どちらでも可", 2)],
        ),
        FieldDescriptor::choice(
            ChoiceKind::Checkbox,
            "time",
            "連絡可能な時間帯（電話）",
            &[("09:00〜12:00", 0), ("13:00〜16:00", 1), ("16:00〜19:00", 2)],
        ),
        FieldDescriptor::select(
            "inquiry_kind",
            "お問い合せの種類",
            &[("返品について", 0), ("発送について", 1), ("その他", 2)],
        ),
        FieldDescriptor::textarea(
            "inquiry_detail",
            "お問い合せ内容",
            "例）お問い合わせ内容詳細をご記入ください",
        ),
    ])
    .with_title("お問い合わせ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validate::validate;

    #[test]
    fn contact_form_has_eight_fields_in_display_order() {
        let names: Vec<String> = contact_form()
            .fields
            .iter()
            .map(|f| f.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "name",
                "email",
                "tel",
                "address",
                "contact",
                "time",
                "inquiry_kind",
                "inquiry_detail"
            ]
        );
    }

    #[test]
    fn contact_form_is_valid() {
        assert!(validate(&contact_form()).is_empty());
    }
}
