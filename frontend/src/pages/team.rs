use yew::prelude::*;

use crate::components::reveal::{Motion, Reveal};

struct Leader {
    name: &'static str,
    position: &'static str,
    bio: &'static str,
    email: &'static str,
    linkedin: &'static str,
    image: &'static str,
}

impl Leader {
    fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

struct Member {
    name: &'static str,
    position: &'static str,
    image: &'static str,
}

struct Department {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    members: [Member; 4],
}

struct Stat {
    number: &'static str,
    label: &'static str,
    icon: &'static str,
}

const PHOTO_QUERY: &str = "?q=80&w=1170&auto=format&fit=crop";

const LEADERSHIP: [Leader; 4] = [
    Leader {
        name: "Robert Johnson",
        position: "Chief Executive Officer",
        bio: "With over 20 years in logistics, Robert leads our global operations with vision and innovation.",
        email: "r.johnson@globallogistics.com",
        linkedin: "#",
        image: "https://images.unsplash.com/photo-1603415526960-f7e0328c63b1",
    },
    Leader {
        name: "Sarah Chen",
        position: "Chief Operating Officer",
        bio: "Sarah oversees our day-to-day operations ensuring excellence in service delivery worldwide.",
        email: "s.chen@globallogistics.com",
        linkedin: "#",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80",
    },
    Leader {
        name: "Michael Rodriguez",
        position: "Chief Technology Officer",
        bio: "Michael drives our technology initiatives, keeping us at the forefront of logistics innovation.",
        email: "m.rodriguez@globallogistics.com",
        linkedin: "#",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d",
    },
    Leader {
        name: "Emily Watson",
        position: "Chief Financial Officer",
        bio: "Emily manages our financial strategy and ensures sustainable growth across all markets.",
        email: "e.watson@globallogistics.com",
        linkedin: "#",
        image: "https://images.unsplash.com/photo-1619895862022-09114b41f16f",
    },
];

const DEPARTMENTS: [Department; 3] = [
    Department {
        title: "Operations Team",
        description: "Ensuring smooth execution of logistics operations worldwide",
        icon: "🎯",
        members: [
            Member { name: "David Kim", position: "Operations Director", image: "https://plus.unsplash.com/premium_photo-1689708721750-8a0e6dc14cee" },
            Member { name: "Lisa Thompson", position: "Regional Manager - Americas", image: "https://plus.unsplash.com/premium_photo-1689551670902-19b441a6afde" },
            Member { name: "Ahmed Hassan", position: "Regional Manager - EMEA", image: "https://plus.unsplash.com/premium_photo-1689565611422-b2156cc65e47" },
            Member { name: "Yuki Tanaka", position: "Regional Manager - APAC", image: "https://plus.unsplash.com/premium_photo-1689629870780-5d0e655383e6" },
        ],
    },
    Department {
        title: "Customer Success",
        description: "Dedicated to providing exceptional customer service and support",
        icon: "👥",
        members: [
            Member { name: "Jennifer Martinez", position: "Customer Success Director", image: "https://plus.unsplash.com/premium_photo-1689551671548-79ff30459d2a" },
            Member { name: "Tom Wilson", position: "Account Manager", image: "https://plus.unsplash.com/premium_photo-1690295364571-d2d06159e0a7" },
            Member { name: "Maria Garcia", position: "Support Specialist", image: "https://plus.unsplash.com/premium_photo-1689551671541-31a345ce6ae0" },
            Member { name: "James Brown", position: "Training Coordinator", image: "https://plus.unsplash.com/premium_photo-1689747698547-271d2d553cee" },
        ],
    },
    Department {
        title: "Technology Team",
        description: "Building innovative solutions for modern logistics challenges",
        icon: "🌐",
        members: [
            Member { name: "Alex Petrov", position: "Lead Developer", image: "https://plus.unsplash.com/premium_photo-1689977927774-401b12d137d6" },
            Member { name: "Priya Sharma", position: "Data Analyst", image: "https://plus.unsplash.com/premium_photo-1690294614341-cf346ba0a637" },
            Member { name: "Carlos Lopez", position: "System Administrator", image: "https://plus.unsplash.com/premium_photo-1689530775582-83b8abdb5020" },
            Member { name: "Rachel Green", position: "UX Designer", image: "https://plus.unsplash.com/premium_photo-1690296204289-14e517830d8e" },
        ],
    },
];

const STATS: [Stat; 4] = [
    Stat { number: "150+", label: "Team Members", icon: "👥" },
    Stat { number: "25+", label: "Countries", icon: "🌐" },
    Stat { number: "15+", label: "Years Average Experience", icon: "🏆" },
    Stat { number: "98%", label: "Employee Satisfaction", icon: "🎯" },
];

fn photo(image: &str) -> String {
    format!("{}{}", image, PHOTO_QUERY)
}

// Grid items come in 100ms apart, whole departments 200ms apart.
fn stagger(index: usize, step_ms: u32) -> u32 {
    index as u32 * step_ms
}

#[function_component(TeamPage)]
pub fn team_page() -> Html {
    html! {
        <div class="team-page">
            <style>{TEAM_STYLES}</style>
            <section class="page-hero">
                <Reveal on_load={true}>
                    <h1>{"Meet Our "}<span class="accent">{"Team"}</span></h1>
                    <p>
                        {"The passionate professionals driving innovation and excellence in global logistics solutions."}
                    </p>
                </Reveal>
            </section>

            <section class="team-stats">
                <div class="four-grid">
                    { for STATS.iter().enumerate().map(|(index, stat)| html! {
                        <Reveal delay_ms={stagger(index, 100)} class="stat-card">
                            <div class="stat-icon">{stat.icon}</div>
                            <div class="stat-number">{stat.number}</div>
                            <div class="stat-label">{stat.label}</div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="leadership">
                <Reveal class="section-heading">
                    <h2>{"Leadership Team"}</h2>
                    <p>{"Experienced leaders guiding our company towards continued success and innovation"}</p>
                </Reveal>
                <div class="four-grid">
                    { for LEADERSHIP.iter().enumerate().map(|(index, leader)| html! {
                        <Reveal delay_ms={stagger(index, 100)} class="leader-card">
                            <div class="leader-banner">
                                <img src={photo(leader.image)} alt={leader.name} />
                            </div>
                            <div class="leader-body">
                                <h3>{leader.name}</h3>
                                <p class="leader-position">{leader.position}</p>
                                <p class="leader-bio">{leader.bio}</p>
                                <div class="leader-links">
                                    <a href={leader.mailto()}>{"✉️"}</a>
                                    <a href={leader.linkedin}>{"in"}</a>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="departments">
                <Reveal class="section-heading">
                    <h2>{"Our Departments"}</h2>
                    <p>{"Specialized teams working together to deliver exceptional results"}</p>
                </Reveal>
                { for DEPARTMENTS.iter().enumerate().map(|(index, department)| html! {
                    <Reveal delay_ms={stagger(index, 200)} class="department-card">
                        <div class="department-header">
                            <span class="department-icon">{department.icon}</span>
                            <div>
                                <h3>{department.title}</h3>
                                <p>{department.description}</p>
                            </div>
                        </div>
                        <div class="four-grid">
                            { for department.members.iter().enumerate().map(|(slot, member)| html! {
                                <Reveal motion={Motion::Grow} delay_ms={stagger(slot, 100)} class="member">
                                    <img src={photo(member.image)} alt={member.name} />
                                    <h4>{member.name}</h4>
                                    <p>{member.position}</p>
                                </Reveal>
                            }) }
                        </div>
                    </Reveal>
                }) }
            </section>

            <section class="join-us">
                <Reveal>
                    <h2>{"Join Our Team"}</h2>
                    <p>
                        {"Ready to be part of a dynamic team that's shaping the future of logistics? We're always looking for talented individuals to join our growing family."}
                    </p>
                    <div class="join-actions">
                        <button class="primary-button">{"View Open Positions"}</button>
                        <button class="outline-button">{"Submit Resume"}</button>
                    </div>
                </Reveal>
            </section>
        </div>
    }
}

const TEAM_STYLES: &str = r#"
.four-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
}
.team-stats {
    padding: 4rem 1.5rem;
    background: #ecfdf5;
}
.stat-card {
    text-align: center;
    background: #fff;
    border-radius: 12px;
    padding: 1.5rem;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
}
.stat-icon { font-size: 2.5rem; margin-bottom: 1rem; }
.stat-number { font-size: 2rem; font-weight: 700; color: #111827; }
.stat-label { color: #4b5563; }
.leadership { padding: 5rem 1.5rem; }
.leader-card {
    background: #fff;
    border-radius: 12px;
    overflow: hidden;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
    transition: box-shadow 0.3s ease;
}
.leader-card:hover { box-shadow: 0 20px 35px rgba(0, 0, 0, 0.12); }
.leader-banner {
    height: 16rem;
    background: linear-gradient(135deg, #34d399, #059669);
    display: flex;
    align-items: center;
    justify-content: center;
}
.leader-banner img {
    width: 8rem;
    height: 8rem;
    border-radius: 50%;
    border: 4px solid #fff;
    object-fit: cover;
}
.leader-body { padding: 1.5rem; }
.leader-position { color: #059669; font-weight: 500; }
.leader-bio { color: #4b5563; font-size: 0.9rem; line-height: 1.6; }
.leader-links a {
    color: #9ca3af;
    margin-right: 0.75rem;
    text-decoration: none;
}
.leader-links a:hover { color: #059669; }
.departments {
    padding: 5rem 1.5rem;
    background: #f9fafb;
}
.department-card {
    max-width: 1200px;
    margin: 0 auto 4rem auto;
    background: #fff;
    border-radius: 12px;
    padding: 2rem;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
}
.department-card:last-child { margin-bottom: 0; }
.department-header {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1.5rem;
}
.department-icon { font-size: 2rem; }
.member { text-align: center; }
.member img {
    width: 6rem;
    height: 6rem;
    border-radius: 50%;
    border: 4px solid #d1fae5;
    object-fit: cover;
}
.member p { color: #4b5563; font-size: 0.875rem; }
.join-us {
    padding: 5rem 1.5rem;
    background: #111827;
    color: #fff;
    text-align: center;
}
.join-us p { color: #d1d5db; font-size: 1.25rem; max-width: 48rem; margin: 0 auto 2rem auto; }
.join-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
}
.primary-button, .outline-button {
    padding: 1rem 2rem;
    border-radius: 8px;
    font-size: 1.1rem;
    font-weight: 600;
    cursor: pointer;
}
.primary-button { background: #059669; color: #fff; border: none; }
.primary-button:hover { background: #047857; }
.outline-button { background: transparent; color: #fff; border: 2px solid #fff; }
.outline-button:hover { background: #fff; color: #111827; }
@media (max-width: 1024px) {
    .four-grid { grid-template-columns: repeat(2, 1fr); }
}
@media (max-width: 640px) {
    .four-grid { grid-template-columns: 1fr; }
    .join-actions { flex-direction: column; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leader_contact_links_are_mailto() {
        for leader in &LEADERSHIP {
            assert_eq!(leader.mailto(), format!("mailto:{}", leader.email));
        }
    }

    #[test]
    fn photos_are_requested_cropped() {
        assert!(photo(LEADERSHIP[0].image).ends_with("&fit=crop"));
    }

    #[test]
    fn departments_stagger_slower_than_cards() {
        assert_eq!(stagger(3, 100), 300);
        assert_eq!(stagger(2, 200), 400);
    }
}
