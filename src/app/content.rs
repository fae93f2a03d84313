//! Inert site content: nav links and the portfolio/experience tables. The
//! sections render straight from these statics.

pub struct NavLink {
    pub id: &'static str,
    pub title: &'static str,
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink {
        id: "hero",
        title: "Hero",
    },
    NavLink {
        id: "portfolio",
        title: "Portfolio",
    },
    NavLink {
        id: "experience",
        title: "Experience",
    },
    NavLink {
        id: "contact",
        title: "Contact",
    },
];

pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub static PROJECTS: &[Project] = &[
    Project {
        name: "3legant",
        description: "3legant is a modern e-commerce platform built with the MERN stack, featuring a responsive React 19 frontend with Vite, Tailwind CSS, and Radix UI. It offers a seamless shopping experience with product filtering, a shopping cart, and user authentication, while the Node.js backend ensures secure API endpoints, JWT authentication, and full CRUD functionality.",
        image: "/project/3legant.jpeg",
    },
    Project {
        name: "Budgify",
        description: "Budgify is a modern personal finance dashboard built with Next.js, offering real-time financial tracking, analytics, and visualization. It features income & expense tracking, smart categorization, interactive charts, and multi-account support. With end-to-end encryption and biometric authentication, Budgify ensures secure and seamless personal finance management.",
        image: "/project/budgify.jpeg",
    },
    Project {
        name: "LiveDocs",
        description: "LiveDocs is a collaborative document editor inspired by Google Docs. Built with Next.js for the user interface, Liveblocks for real-time functionality, and styled using TailwindCSS, this project highlights the developer's expertise in building real-time, collaborative applications.",
        image: "/project/live-docs.jpeg",
    },
    Project {
        name: "Algorun",
        description: "Algorun is a powerful online IDE built with Next.js 15, Convex, Clerk, and TypeScript, offering a seamless multi-language coding experience. It provides smart output handling, customizable themes, and community-driven code-sharing, making it the perfect choice for developers looking for flexibility and efficiency.",
        image: "/project/algorun.jpeg",
    },
    Project {
        name: "CarePulse",
        description: "CarePulse is a modern doctor appointment scheduling platform built with Next.js, Tailwind CSS, and Appwrite. It provides seamless appointment booking for users, an admin panel for managing doctors and schedules, and a user-friendly experience for healthcare professionals.",
        image: "/project/care-pulse.jpeg",
    },
];

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub date: &'static str,
    /// Highlight lines; may carry inline emphasis markup, rendered with
    /// `inner_html`.
    pub details: &'static [&'static str],
}

pub static EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Full Stack Development Intern",
        company: "CodeCraft Studios",
        date: "June 2024 - November 2024",
        details: &[
            "Contributed to the development of a high-performing <span class='text-foreground'>e-commerce platform</span>, boosting online sales.",
            "Implemented <span class='text-foreground'>responsive design techniques</span>, increasing user engagement by 25%.",
            "Collaborated with senior developers to refine <span class='text-foreground'>backend functionalities</span> for improved efficiency.",
        ],
    },
    Experience {
        title: "Frontend Development Intern",
        company: "Sam's Developers",
        date: "October 2023 - March 2024",
        details: &[
            "Assisted in <span class='text-foreground'>redesigning websites</span> to enhance user experience and engagement.",
            "Optimized frontend performance, reducing <span class='text-foreground'>load times by 20%</span>.",
            "Ensured <span class='text-foreground'>accessibility compliance</span>, improving inclusivity for all users.",
        ],
    },
    Experience {
        title: "Freelance Developer",
        company: "Self Employed",
        date: "2023 - Present",
        details: &[
            "Developed custom <span class='text-foreground'>web applications</span> for various clients, enhancing online presence.",
            "Built <span class='text-foreground'>interactive and scalable solutions</span> using React.js, Next.js, and Tailwind CSS.",
            "Integrated <span class='text-foreground'>secure authentication and real-time features</span> into client projects.",
        ],
    },
    Experience {
        title: "Bachelor of Information Technology",
        company: "University of Punjab",
        date: "2025",
        details: &[
            "Specialized in <span class='text-foreground'>Full Stack Development</span> with a minor in Mathematics.",
            "Worked on AI-powered legal assistant project, <span class='text-foreground'>LawBotics</span>, utilizing NLP and machine learning.",
            "Developed <span class='text-foreground'>LiveDocs</span>, a real-time collaborative document editing platform.",
        ],
    },
];
