//! Static message catalog and resolver.

use crate::language::LanguageKey;
use tracing::debug;

/// Message identifier
///
/// Closed set of every string the shell displays. Adding a UI string means
/// adding a variant here and an entry to each locale table; the completeness
/// check in [`Catalog::validate`] covers the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    /// Insecure-connection banner on the home screen
    Banner,
    Connect,
    Disconnect,
    Connecting,
    VpnConnected,
    VpnDisconnected,
    Settings,
    Feedback,
    Telegram,
    About,
    AboutText,
    Language,
    Cancel,
    Ok,
    Send,
    EmailPlaceholder,
    OpinionPlaceholder,
}

impl MessageId {
    /// Every message id, for completeness validation
    pub const ALL: &'static [MessageId] = &[
        MessageId::Banner,
        MessageId::Connect,
        MessageId::Disconnect,
        MessageId::Connecting,
        MessageId::VpnConnected,
        MessageId::VpnDisconnected,
        MessageId::Settings,
        MessageId::Feedback,
        MessageId::Telegram,
        MessageId::About,
        MessageId::AboutText,
        MessageId::Language,
        MessageId::Cancel,
        MessageId::Ok,
        MessageId::Send,
        MessageId::EmailPlaceholder,
        MessageId::OpinionPlaceholder,
    ];
}

/// One locale's string table
///
/// All entries are static; tables are defined below and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    pub banner: &'static str,
    pub connect: &'static str,
    pub disconnect: &'static str,
    pub connecting: &'static str,
    pub vpn_connected: &'static str,
    pub vpn_disconnected: &'static str,
    pub settings: &'static str,
    pub feedback: &'static str,
    pub telegram: &'static str,
    pub about: &'static str,
    pub about_text: &'static str,
    pub language: &'static str,
    pub cancel: &'static str,
    pub ok: &'static str,
    pub send: &'static str,
    pub email_placeholder: &'static str,
    pub opinion_placeholder: &'static str,
}

impl Strings {
    /// Look up a message by id
    pub fn get(&self, id: MessageId) -> &'static str {
        match id {
            MessageId::Banner => self.banner,
            MessageId::Connect => self.connect,
            MessageId::Disconnect => self.disconnect,
            MessageId::Connecting => self.connecting,
            MessageId::VpnConnected => self.vpn_connected,
            MessageId::VpnDisconnected => self.vpn_disconnected,
            MessageId::Settings => self.settings,
            MessageId::Feedback => self.feedback,
            MessageId::Telegram => self.telegram,
            MessageId::About => self.about,
            MessageId::AboutText => self.about_text,
            MessageId::Language => self.language,
            MessageId::Cancel => self.cancel,
            MessageId::Ok => self.ok,
            MessageId::Send => self.send,
            MessageId::EmailPlaceholder => self.email_placeholder,
            MessageId::OpinionPlaceholder => self.opinion_placeholder,
        }
    }
}

static RUSSIAN: Strings = Strings {
    banner: "Ваше соединение не защищено!",
    connect: "Подключить",
    disconnect: "Отключить",
    connecting: "Подключение...",
    vpn_connected: "VPN Подключен",
    vpn_disconnected: "VPN Отключен",
    settings: "Настройки",
    feedback: "Оставить Отзыв",
    telegram: "Перейти в Telegram канал",
    about: "О Нас",
    about_text: "For all students who wants scroll social media without any interruptions 🫶",
    language: "Язык",
    cancel: "Отменить",
    ok: "OK",
    send: "Отправить",
    email_placeholder: "электронная почта",
    opinion_placeholder: "Расскажите нам, что вы думаете об этом приложении, что мы должны улучшить? Спасибо!",
};

static ENGLISH: Strings = Strings {
    banner: "Your connection is not secure!",
    connect: "Connect",
    disconnect: "Disconnect",
    connecting: "Connecting...",
    vpn_connected: "VPN Connected",
    vpn_disconnected: "VPN Disconnected",
    settings: "Settings",
    feedback: "Leave Feedback",
    telegram: "Join Telegram Channel",
    about: "About",
    about_text: "For all students who wants scroll social media without any interruptions 🫶",
    language: "Language",
    cancel: "Cancel",
    ok: "OK",
    send: "Send",
    email_placeholder: "Email",
    opinion_placeholder: "Tell us what you think about this app, what we should improve? Thank you!",
};

static TURKISH: Strings = Strings {
    banner: "Bağlantınız güvenli değil!",
    connect: "Bağlan",
    disconnect: "Bağlantıyı Kes",
    connecting: "Bağlanıyor...",
    vpn_connected: "VPN Bağlandı",
    vpn_disconnected: "VPN Bağlı Değil",
    settings: "Ayarlar",
    feedback: "Geri Bildirim",
    telegram: "Telegram Kanalına Katıl",
    about: "Hakkımızda",
    about_text: "Kesintisiz sosyal medya gezintisi isteyen tüm öğrenciler için 🫶",
    language: "Dil",
    cancel: "İptal",
    ok: "Tamam",
    send: "Gönder",
    email_placeholder: "E-posta",
    opinion_placeholder: "Bu uygulama hakkında ne düşündüğünüzü, neyi geliştirmemiz gerektiğini bize söyleyin! Teşekkürler!",
};

/// Catalog errors (configuration defects, surfaced at startup)
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Empty message {id:?} for language {language}")]
    EmptyMessage { language: LanguageKey, id: MessageId },
}

/// Localization resolver
///
/// Stateless; resolution is a total function over [`LanguageKey`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    /// Create a resolver
    pub fn new() -> Self {
        Self
    }

    /// Resolve the string table for a language
    pub fn resolve(&self, key: LanguageKey) -> &'static Strings {
        match key {
            LanguageKey::Russian => &RUSSIAN,
            LanguageKey::English => &ENGLISH,
            LanguageKey::Turkish => &TURKISH,
        }
    }

    /// Resolve a single message
    pub fn text(&self, key: LanguageKey, id: MessageId) -> &'static str {
        self.resolve(key).get(id)
    }

    /// Check every language table defines every message id
    ///
    /// Run once at startup. The enum layout already forces every table to
    /// carry every field; this catches entries left empty.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for &language in LanguageKey::all() {
            let strings = self.resolve(language);
            for &id in MessageId::ALL {
                if strings.get(id).is_empty() {
                    return Err(CatalogError::EmptyMessage { language, id });
                }
            }
        }
        debug!(
            "Catalog validated: {} languages x {} messages",
            LanguageKey::all().len(),
            MessageId::ALL.len()
        );
        Ok(())
    }
}
