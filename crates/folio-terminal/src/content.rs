//! Canned text shown by the portfolio commands.
//!
//! Each block is returned line by line; the session adds the trailing
//! spacer, so none of these end with a blank line.

/// `about`: who I am.
pub const ABOUT: &[&str] = &[
    "╔═══════════════════════════════════════════════════════════╗",
    "║                    ABOUT AGUSTIN YASKULOSKI               ║",
    "╚═══════════════════════════════════════════════════════════╝",
    "",
    "👨‍💻 AI Developer & Engineer",
    "📍 Based in [Your Location]",
    "🎓 Specialized in Artificial Intelligence and Machine Learning",
    "",
    "I'm a passionate AI developer focused on building intelligent",
    "systems that solve real-world problems. With expertise in",
    "machine learning, deep learning, and NLP, I create innovative",
    "solutions that push the boundaries of what's possible with AI.",
    "",
    "My work spans from developing neural networks to deploying",
    "production-ready AI systems at scale.",
];

/// `skills`: technical skills.
pub const SKILLS: &[&str] = &[
    "╔═══════════════════════════════════════════════════════════╗",
    "║                    TECHNICAL SKILLS                       ║",
    "╚═══════════════════════════════════════════════════════════╝",
    "",
    "🤖 AI/ML:",
    "   • TensorFlow, PyTorch, Keras",
    "   • Neural Networks & Deep Learning",
    "   • NLP & Computer Vision",
    "   • LLMs & GPT Integration",
    "",
    "💻 Programming:",
    "   • Python, JavaScript/TypeScript",
    "   • React, Next.js, Node.js",
    "   • FastAPI, Flask, Django",
    "",
    "🛠️ Tools & Technologies:",
    "   • Docker, Kubernetes",
    "   • AWS, GCP, Azure",
    "   • Git, CI/CD",
    "   • Vector Databases (Pinecone, Weaviate)",
    "",
    "📊 Data Science:",
    "   • Pandas, NumPy, Scikit-learn",
    "   • Data Visualization",
    "   • Statistical Analysis",
];

/// `projects`: selected projects.
pub const PROJECTS: &[&str] = &[
    "╔═══════════════════════════════════════════════════════════╗",
    "║                       PROJECTS                            ║",
    "╚═══════════════════════════════════════════════════════════╝",
    "",
    "🔹 AI Chatbot Platform",
    "   Advanced conversational AI using GPT-4 and custom NLP",
    "   Stack: Python, FastAPI, React, PostgreSQL",
    "   [View on GitHub]",
    "",
    "🔹 Computer Vision System",
    "   Real-time object detection and tracking system",
    "   Stack: PyTorch, OpenCV, Docker",
    "   [View on GitHub]",
    "",
    "🔹 ML Model Deployment Pipeline",
    "   Automated ML model training and deployment infrastructure",
    "   Stack: TensorFlow, Kubernetes, MLflow",
    "   [View on GitHub]",
    "",
    "🔹 Sentiment Analysis API",
    "   High-performance sentiment analysis for social media",
    "   Stack: Transformers, FastAPI, Redis",
    "   [View on GitHub]",
];

/// `experience`: work history.
pub const EXPERIENCE: &[&str] = &[
    "╔═══════════════════════════════════════════════════════════╗",
    "║                   WORK EXPERIENCE                         ║",
    "╚═══════════════════════════════════════════════════════════╝",
    "",
    "🏢 Senior AI Engineer @ TechCorp",
    "   2022 - Present",
    "   • Led development of AI-powered recommendation system",
    "   • Improved model accuracy by 35%",
    "   • Managed team of 5 ML engineers",
    "",
    "🏢 ML Engineer @ StartupAI",
    "   2020 - 2022",
    "   • Built NLP pipeline for document processing",
    "   • Deployed models handling 1M+ requests/day",
    "   • Reduced inference time by 60%",
    "",
    "🏢 AI Research Intern @ AI Lab",
    "   2019 - 2020",
    "   • Conducted research on neural architecture search",
    "   • Published paper at major ML conference",
    "   • Developed novel optimization techniques",
];

/// `contact`: how to reach me.
pub const CONTACT: &[&str] = &[
    "╔═══════════════════════════════════════════════════════════╗",
    "║                    CONTACT INFO                           ║",
    "╚═══════════════════════════════════════════════════════════╝",
    "",
    "📧 Email:     agustin.yaskuloski@email.com",
    "🐙 GitHub:    github.com/agustinyaskuloski",
    "💼 LinkedIn:  linkedin.com/in/agustinyaskuloski",
    "🐦 Twitter:   @ayaskuloski",
    "🌐 Website:   agustinyaskuloski.dev",
    "",
    "Feel free to reach out for collaborations or opportunities!",
];

/// `whoami`.
pub const WHOAMI: &[&str] = &[
    "agustin@portfolio:~$ Agustin Yaskuloski - AI Developer & Engineer",
];

/// `ls`: the listing of the fake home directory.
pub const LS: &[&str] = &[
    "about.txt      skills.md      projects/",
    "experience.md  contact.txt    resume.pdf",
];

/// `cat` without a file argument.
pub const CAT_USAGE: &[&str] = &[
    "Usage: cat [filename]",
    "Try: cat resume.txt",
];

/// `cat resume.txt`.
pub const RESUME: &[&str] = &[
    "════════════════════════════════════════════════════════",
    "               AGUSTIN YASKULOSKI - RESUME              ",
    "════════════════════════════════════════════════════════",
    "",
    "AI Developer & Engineer specializing in building",
    "intelligent systems and deploying ML models at scale.",
    "",
    "Key Achievements:",
    "• Built AI systems processing 10M+ daily requests",
    "• Improved model accuracy by 35% through novel techniques",
    "• Led teams developing production ML infrastructure",
    "",
    "For full resume, contact me at: agustin.yaskuloski@email.com",
];
