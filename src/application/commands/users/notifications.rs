use crate::application::ports::mailer::OutgoingMail;
use crate::domain::user::User;

pub(super) fn registration_received(user: &User) -> OutgoingMail {
    OutgoingMail {
        to: user.email.to_string(),
        subject: "Your account request has been received".into(),
        html: format!(
            "<p>Hi {},</p><p>Your account request has been submitted. You will be notified once approved.</p>",
            user.name
        ),
    }
}

pub(super) fn approval_decision(user: &User, approved: bool) -> OutgoingMail {
    let (subject, html) = if approved {
        (
            "Your account has been approved",
            "<p>Congratulations! Your account is now approved.</p><p>You can now login.</p>",
        )
    } else {
        (
            "Your account request was rejected",
            "<p>We're sorry, but your account request was not approved.</p>",
        )
    };
    OutgoingMail {
        to: user.email.to_string(),
        subject: subject.into(),
        html: html.into(),
    }
}

pub(super) fn password_reset(user: &User, link: &str) -> OutgoingMail {
    OutgoingMail {
        to: user.email.to_string(),
        subject: "Reset your password".into(),
        html: format!(
            "<p>Hi {},</p><p>Use the link below to choose a new password. It expires in one hour.</p><p><a href=\"{link}\">{link}</a></p>",
            user.name
        ),
    }
}
