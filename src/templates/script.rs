//! Client-side script embedded in rendered pages.
//!
//! Keeps navigation highlighting and the citation accordion live in the
//! browser. The rules match `nav::active_section` and `accordion::select`:
//! the last section whose top (minus 150px) has been scrolled past is active,
//! and opening a citation panel closes the previously open one.

pub const SITE_SCRIPT: &str = r#"
<script>
(function() {
    const LOOKAHEAD = 150;
    let openBib = null;

    function activeSection(sections) {
        let current = null;
        sections.forEach(section => {
            if (window.scrollY >= section.offsetTop - LOOKAHEAD) {
                current = section.id;
            }
        });
        return current;
    }

    function highlight(links, current) {
        links.forEach(link => {
            const href = link.getAttribute('href') || '';
            const hash = href.indexOf('#');
            const fragment = hash >= 0 ? href.slice(hash + 1) : null;
            link.classList.toggle('active', current !== null && fragment === current);
        });
    }

    function renderPanels() {
        document.querySelectorAll('.bibtex-hidden').forEach(el => {
            el.style.display = el.id === openBib ? 'block' : 'none';
        });
    }

    window.toggleBib = function(id) {
        openBib = openBib === id ? null : id;
        renderPanels();
    };

    document.addEventListener('DOMContentLoaded', () => {
        const sections = Array.from(document.querySelectorAll('section[id]'));
        const links = Array.from(document.querySelectorAll('.nav-item'));
        if (sections.length === 0 || links.length === 0) return;
        window.addEventListener('scroll', () => highlight(links, activeSection(sections)));
    });
})();
</script>
"#;
