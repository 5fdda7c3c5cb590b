//! Typed translation bundles for English, Malayalam, and Tamil.
//!
//! Each bundle is a static struct; lookups are plain field accesses and
//! methods rather than string-keyed maps, so a missing label is a
//! compile error instead of a runtime fallback.

use farmhand_types::{Language, TaskPriority};

/// All user-facing text for one language.
#[derive(Debug)]
pub struct Translations {
    pub nav: NavText,
    pub tasks: TaskListText,
    pub upcoming: UpcomingText,
    pub dashboard: DashboardText,
}

#[derive(Debug)]
pub struct NavText {
    pub dashboard: &'static str,
    pub upcoming: &'static str,
}

#[derive(Debug)]
pub struct TaskListText {
    pub title: &'static str,
    pub view_all: &'static str,
    pub no_tasks: &'static str,
    priority_high: &'static str,
    priority_medium: &'static str,
    priority_low: &'static str,
}

impl TaskListText {
    /// Localized label for a priority badge.
    pub fn priority(&self, priority: TaskPriority) -> &'static str {
        match priority {
            TaskPriority::High => self.priority_high,
            TaskPriority::Medium => self.priority_medium,
            TaskPriority::Low => self.priority_low,
        }
    }
}

#[derive(Debug)]
pub struct UpcomingText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub todays_tasks: &'static str,
    pub upcoming_header: &'static str,
    pub no_upcoming_tasks: &'static str,
    day_word: &'static str,
}

impl UpcomingText {
    /// Localized header for the day `n` days out.
    pub fn day(&self, n: usize) -> String {
        format!("{} {}", self.day_word, n)
    }
}

#[derive(Debug)]
pub struct DashboardText {
    pub greeting: &'static str,
    pub advice_header: &'static str,
    pub market_header: &'static str,
}

static EN: Translations = Translations {
    nav: NavText {
        dashboard: "Dashboard",
        upcoming: "Upcoming",
    },
    tasks: TaskListText {
        title: "Today's Tasks",
        view_all: "View All",
        no_tasks: "No tasks for today.",
        priority_high: "High",
        priority_medium: "Medium",
        priority_low: "Low",
    },
    upcoming: UpcomingText {
        title: "Upcoming Tasks",
        subtitle: "Your farm schedule for the days ahead",
        todays_tasks: "Today's Tasks",
        upcoming_header: "Later This Week",
        no_upcoming_tasks: "No upcoming tasks scheduled.",
        day_word: "Day",
    },
    dashboard: DashboardText {
        greeting: "Hello",
        advice_header: "Today's Advice",
        market_header: "Market Prices",
    },
};

static ML: Translations = Translations {
    nav: NavText {
        dashboard: "ഡാഷ്ബോർഡ്",
        upcoming: "വരാനിരിക്കുന്നവ",
    },
    tasks: TaskListText {
        title: "ഇന്നത്തെ ജോലികൾ",
        view_all: "എല്ലാം കാണുക",
        no_tasks: "ഇന്ന് ജോലികളൊന്നുമില്ല.",
        priority_high: "ഉയർന്നത്",
        priority_medium: "ഇടത്തരം",
        priority_low: "കുറഞ്ഞത്",
    },
    upcoming: UpcomingText {
        title: "വരാനിരിക്കുന്ന ജോലികൾ",
        subtitle: "അടുത്ത ദിവസങ്ങളിലെ കൃഷി ആസൂത്രണം",
        todays_tasks: "ഇന്നത്തെ ജോലികൾ",
        upcoming_header: "ഈ ആഴ്ചയിൽ",
        no_upcoming_tasks: "വരാനിരിക്കുന്ന ജോലികളൊന്നുമില്ല.",
        day_word: "ദിവസം",
    },
    dashboard: DashboardText {
        greeting: "നമസ്കാരം",
        advice_header: "ഇന്നത്തെ ഉപദേശം",
        market_header: "വിപണി വില",
    },
};

static TA: Translations = Translations {
    nav: NavText {
        dashboard: "டாஷ்போர்டு",
        upcoming: "வரவிருப்பவை",
    },
    tasks: TaskListText {
        title: "இன்றைய பணிகள்",
        view_all: "அனைத்தையும் காண்க",
        no_tasks: "இன்று பணிகள் இல்லை.",
        priority_high: "அதிகம்",
        priority_medium: "நடுத்தரம்",
        priority_low: "குறைவு",
    },
    upcoming: UpcomingText {
        title: "வரவிருக்கும் பணிகள்",
        subtitle: "அடுத்த நாட்களுக்கான பண்ணை அட்டவணை",
        todays_tasks: "இன்றைய பணிகள்",
        upcoming_header: "இந்த வாரத்தில்",
        no_upcoming_tasks: "வரவிருக்கும் பணிகள் இல்லை.",
        day_word: "நாள்",
    },
    dashboard: DashboardText {
        greeting: "வணக்கம்",
        advice_header: "இன்றைய ஆலோசனை",
        market_header: "சந்தை விலை",
    },
};

/// Bundle for the given language.
pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::En => &EN,
        Language::Ml => &ML,
        Language::Ta => &TA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_label_formats_offset() {
        assert_eq!(translations(Language::En).upcoming.day(2), "Day 2");
        assert_eq!(translations(Language::Ml).upcoming.day(3), "ദിവസം 3");
        assert_eq!(translations(Language::Ta).upcoming.day(4), "நாள் 4");
    }

    #[test]
    fn test_priority_labels_differ_per_language() {
        let en = translations(Language::En).tasks.priority(TaskPriority::High);
        let ml = translations(Language::Ml).tasks.priority(TaskPriority::High);
        let ta = translations(Language::Ta).tasks.priority(TaskPriority::High);
        assert_ne!(en, ml);
        assert_ne!(en, ta);
        assert_ne!(ml, ta);
    }

    #[test]
    fn test_every_bundle_has_distinct_priority_labels() {
        for language in Language::ALL {
            let tasks = &translations(language).tasks;
            let high = tasks.priority(TaskPriority::High);
            let medium = tasks.priority(TaskPriority::Medium);
            let low = tasks.priority(TaskPriority::Low);
            assert_ne!(high, medium);
            assert_ne!(medium, low);
        }
    }
}
