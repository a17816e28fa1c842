//! Static candidate list for the weekly population job.
//!
//! The list is compiled in and never changes at runtime. Entries are
//! free-form prompt text; the weekly job samples from them without
//! replacement, so the list must hold at least
//! [`SAMPLE_COUNT`](crate::config::SAMPLE_COUNT) entries and no duplicates.
//! Both properties are pinned by the tests below.

/// All candidate questions, in authoring order.
pub static ALL_QUESTIONS: &[&str] = &[
    "What's a small moment from this past week that made you smile?",
    "If you could master any skill overnight, what would it be?",
    "What's the best meal you've ever eaten, and who were you with?",
    "Which place you've never visited would you most like to wake up in tomorrow?",
    "What song always takes you back to a specific memory?",
    "What did you want to be when you were eight years old?",
    "What's a habit you picked up that you're actually proud of?",
    "If you had a completely free day tomorrow, how would you spend it?",
    "What's the most spontaneous thing you've ever done?",
    "Which book or movie changed the way you see the world?",
    "What's something you believed for years that turned out to be wrong?",
    "Who outside your family has influenced you the most?",
    "What's your favorite way to waste an afternoon?",
    "If you could have dinner with anyone from history, who would it be?",
    "What's a compliment you received that you still think about?",
    "What tradition, family or otherwise, means the most to you?",
    "What's the best piece of advice you've ever been given?",
    "If you won the lottery tomorrow, what's the first thing you'd do?",
    "What's something new you tried this year?",
    "Which season fits your personality best, and why?",
    "What's a fear you've overcome, or still want to overcome?",
    "What's your earliest childhood memory?",
    "If your life had a soundtrack, which three songs would be on it?",
    "What's a question you wish people asked you more often?",
    "What skill do you admire most in other people?",
    "What's the kindest thing a stranger has ever done for you?",
    "If you could relive one day exactly as it happened, which would it be?",
    "What's something you're looking forward to right now?",
    "What hobby would you pick up if time and money didn't matter?",
    "What's the funniest thing that has happened to you at school or work?",
    "Which fictional world would you most want to live in for a week?",
    "What's a food you hated as a kid but love now?",
    "What does a perfect Sunday morning look like for you?",
    "What's one thing on your bucket list you haven't told many people about?",
    "If you could instantly speak another language, which would you choose?",
    "What's the best gift you've ever given someone?",
    "What's a lesson you learned the hard way?",
    "When do you feel most like yourself?",
    "What would your teenage self be most surprised about in your life today?",
    "If you could ask your future self one question, what would it be?",
];
